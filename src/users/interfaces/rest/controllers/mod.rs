pub mod users_rest_controller;
