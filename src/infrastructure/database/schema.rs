// The product table is owned by the ingestion flow, which drops and
// recreates it on every run (see PostgresProductRepository::reset_schema),
// so there are no migrations for it.

diesel::table! {
    products (img_id) {
        img_id -> Text,
        gender -> Text,
        master_category -> Text,
        sub_category -> Text,
        article_type -> Text,
        base_colour -> Text,
        season -> Text,
        year -> Nullable<Integer>,
        usage -> Nullable<Text>,
        product_display_name -> Nullable<Text>,
    }
}
