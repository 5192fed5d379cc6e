use cmakefix_cmake::CMakeListsFinder;
use cmakefix_core::{BuildFileFinder, Config};

// finder list

pub fn get_finders(config: &Config) -> [Box<dyn BuildFileFinder>; 1] {
    [Box::new(CMakeListsFinder::new(&config.file_name))]
}
