use super::*;

// Message delivery, payment processing, and notification fan-out live in
// external systems. The routes are mounted so that clients get a stable
// answer instead of a 404 while those integrations are rolled out.

#[get("/messages")]
pub fn get_messages() -> StatusResult {
    Ok(Status::NotImplemented)
}

#[post("/messages")]
pub fn post_message() -> StatusResult {
    Ok(Status::NotImplemented)
}

#[post("/payments")]
pub fn post_payment() -> StatusResult {
    Ok(Status::NotImplemented)
}

#[get("/notifications")]
pub fn get_notifications() -> StatusResult {
    Ok(Status::NotImplemented)
}
