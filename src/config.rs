/// Per-invocation configuration, passed explicitly to whatever needs it.
#[derive(Clone)]
pub struct Config {
    pub region: String,
    pub verbose: bool,
}

impl Config {
    pub fn new(region: &str, verbose: bool) -> Self {
        Config {
            region: region.to_string(),
            verbose,
        }
    }
}
