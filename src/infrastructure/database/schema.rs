use diesel::table;

table! {
    applications (id) {
        id -> Text,
        name -> Text,
        application_file -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    settings (key) {
        key -> Text,
        value -> Text,
    }
}
