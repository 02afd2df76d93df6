pub mod shared {
    pub mod core {
        pub mod entity;
    }
    pub mod infrastructure {
        pub mod id_generator;
        pub mod repository;
    }
}

pub mod modules {
    pub mod planner {
        pub mod core {
            pub mod errors;
            pub mod event;
            pub mod location;
            pub mod notifications;
            pub mod participant;
            pub mod user;
        }
        pub mod store;
        pub mod use_cases {
            pub mod manage_users {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod manage_locations {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod manage_events {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod manage_participants {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod watch_notifications {
                pub mod inbound {
                    pub mod graphql;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_bus_in_memory;
            }
        }
    }
}

pub mod shell;
