pub mod application {
    pub mod call {
        pub mod service;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod call {
        pub mod repository;
        pub mod service;
    }
}

#[cfg(any(test, feature = "testing"))]
pub mod testing;
