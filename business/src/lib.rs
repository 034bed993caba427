pub mod application {
    pub mod catalog {
        pub mod list_tags;
        pub mod search_ingredients;
    }
    pub mod membership {
        pub mod add;
        pub mod remove;
    }
    pub mod recipe {
        pub mod create;
        pub mod delete;
        pub mod flags;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod shopping_list {
        pub mod generate;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod list_tags;
            pub mod search_ingredients;
        }
    }
    pub mod membership {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod remove;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod model;
        pub mod report;
        pub mod use_cases {
            pub mod generate;
        }
    }
}
