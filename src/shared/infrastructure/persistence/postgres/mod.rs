pub mod sqlx_data_store_impl;
