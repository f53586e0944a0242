mod app;
mod bridge;
mod session;
mod theme;
mod views;

use app::App;
use leptos::*;

fn main() {
    mount_to_body(App);
}
