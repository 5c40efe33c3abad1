// Tables owned by the booktown database. This tool never creates them.

diesel::table! {
    books (id) {
        id -> Integer,
        title -> Text,
    }
}

diesel::table! {
    line_items (order_id, book_id) {
        order_id -> Integer,
        book_id -> Integer,
        quantity -> Integer,
    }
}

diesel::table! {
    orders (id) {
        id -> Integer,
        created -> Text,
        creator -> Nullable<Text>,
    }
}

diesel::joinable!(line_items -> books (book_id));
diesel::joinable!(line_items -> orders (order_id));

diesel::allow_tables_to_appear_in_same_query!(books, line_items, orders,);
