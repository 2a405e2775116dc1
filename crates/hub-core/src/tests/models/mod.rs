mod role;
mod user_identity;
