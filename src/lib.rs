pub mod shared {
    pub mod infrastructure {
        pub mod snapshot_store;
    }
}

pub mod modules {
    pub mod pokemons {
        pub mod core {
            pub mod collection;
            pub mod decision;
            pub mod pokemon;
            pub mod pokemon_type;
            pub mod validate;
        }
        pub mod use_cases {
            pub mod list_pokemons {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_pokemon {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_pokemon {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_pokemon {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_pokemon {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
        }
        pub mod pokedex;
    }
}

pub mod shell;
