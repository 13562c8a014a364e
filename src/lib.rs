pub mod modules {
    pub mod campus {
        pub mod core {
            pub mod enrollment;
            pub mod errors;
            pub mod event;
            pub mod event_registry;
            pub mod ports;
            pub mod state;
            pub mod student;
            pub mod student_registry;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod manage_students {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_enrollments {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod in_memory_campus;
            }
        }
    }
}

pub mod shell;
