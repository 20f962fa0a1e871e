pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod amazon_rvs_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amazon_rvs {
            pub(crate) mod error_response_model;
            pub(crate) mod receipt_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod receipt_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod environment;
        pub mod verification_result;
        pub mod verify_context;
    }
    pub mod repositories {
        pub mod receipt_repository;
    }
}

pub mod constants;
pub mod errors;
pub mod transport;
pub mod util;
