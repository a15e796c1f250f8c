mod execution;
mod user_profiles;
mod utils;
