pub mod appointment_dialog;
pub mod client_search;
pub mod clinic_settings;
pub mod new_client;
