table! {
    posts (rowid) {
        rowid -> BigInt,
        id -> Text,
        author -> Text,
        content -> Text,
        media_url -> Nullable<Text>,
        is_video -> Bool,
        likes -> BigInt,
        created_at -> BigInt,
    }
}

table! {
    comments (rowid) {
        rowid -> BigInt,
        id -> Text,
        post_id -> Text,
        author -> Text,
        text -> Text,
        parent_comment_id -> Nullable<Text>,
        created_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(posts, comments);
