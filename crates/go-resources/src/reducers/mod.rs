pub mod menu_reducer;
