pub mod application {
    pub mod card {
        pub mod search;
    }
    pub mod product {
        pub mod get_by_id;
        pub mod list_retailers;
        pub mod search;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod card {
        pub mod model;
        pub mod use_cases {
            pub mod search;
        }
    }
    pub mod product {
        pub mod aggregator;
        pub mod filters;
        pub mod keywords;
        pub mod model;
        pub mod registry;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod list_retailers;
            pub mod search;
        }
    }
}
