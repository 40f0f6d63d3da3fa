pub mod error;
pub mod generated;

pub mod service {
    pub mod config_service;
    pub mod grpc;
    pub mod logger;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod conversion;
}

pub mod action {
    pub mod cli;
}

pub mod utils {
    pub mod utils;
}
