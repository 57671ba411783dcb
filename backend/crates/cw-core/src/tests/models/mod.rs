mod credential_status;
mod platform;
mod profile_status;
