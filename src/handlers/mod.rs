pub mod auth; // GET /auth - token issuance, unauthenticated
pub mod users; // /users - CRUD, behind the bearer gate
