mod fixtures;
mod reproducible;
