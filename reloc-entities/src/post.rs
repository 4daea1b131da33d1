use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id         : Id,
    pub author     : String,
    pub content    : String,
    pub media_url  : Option<String>,
    pub is_video   : bool,
    pub likes      : i64,
    pub created_at : Timestamp,
}
