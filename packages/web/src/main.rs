use dioxus::prelude::*;

use gateways::Gateways;
use views::{
    CityDelete, CityDetail, CityEdit, CityList, CityNew, RideDelete, RideDetail, RideEdit,
    RideList, RideNew, ShareCityDelete, ShareCityDetail, ShareCityEdit, ShareCityList,
    ShareCityNew, ShareRideDelete, ShareRideDetail, ShareRideEdit, ShareRideList, ShareRideNew,
    ShareUserDelete, ShareUserDetail, ShareUserEdit, ShareUserList, ShareUserNew, UsersDelete,
    UsersDetail, UsersEdit, UsersList, UsersNew,
};

mod gateways;
mod views;

/// Every list keeps its `page` and `sort` in the URL so reloads and the back
/// button land on the same slice. Edit and delete carry them too, to return
/// to the list slice they were opened from. `/x/new` is declared before
/// `/x/:id` so "new" is never parsed as an id.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},

        #[route("/ride?:page&:sort")]
        RideList { page: u64, sort: String },
        #[route("/ride/new")]
        RideNew {},
        #[route("/ride/:id")]
        RideDetail { id: i64 },
        #[route("/ride/:id/edit?:page&:sort")]
        RideEdit { id: i64, page: u64, sort: String },
        #[route("/ride/:id/delete?:page&:sort")]
        RideDelete { id: i64, page: u64, sort: String },

        #[route("/city?:page&:sort")]
        CityList { page: u64, sort: String },
        #[route("/city/new")]
        CityNew {},
        #[route("/city/:id")]
        CityDetail { id: i64 },
        #[route("/city/:id/edit?:page&:sort")]
        CityEdit { id: i64, page: u64, sort: String },
        #[route("/city/:id/delete?:page&:sort")]
        CityDelete { id: i64, page: u64, sort: String },

        #[route("/users?:page&:sort")]
        UsersList { page: u64, sort: String },
        #[route("/users/new")]
        UsersNew {},
        #[route("/users/:id")]
        UsersDetail { id: i64 },
        #[route("/users/:id/edit?:page&:sort")]
        UsersEdit { id: i64, page: u64, sort: String },
        #[route("/users/:id/delete?:page&:sort")]
        UsersDelete { id: i64, page: u64, sort: String },

        #[route("/share-ride?:page&:sort")]
        ShareRideList { page: u64, sort: String },
        #[route("/share-ride/new")]
        ShareRideNew {},
        #[route("/share-ride/:id")]
        ShareRideDetail { id: i64 },
        #[route("/share-ride/:id/edit?:page&:sort")]
        ShareRideEdit { id: i64, page: u64, sort: String },
        #[route("/share-ride/:id/delete?:page&:sort")]
        ShareRideDelete { id: i64, page: u64, sort: String },

        #[route("/share-city?:page&:sort")]
        ShareCityList { page: u64, sort: String },
        #[route("/share-city/new")]
        ShareCityNew {},
        #[route("/share-city/:id")]
        ShareCityDetail { id: i64 },
        #[route("/share-city/:id/edit?:page&:sort")]
        ShareCityEdit { id: i64, page: u64, sort: String },
        #[route("/share-city/:id/delete?:page&:sort")]
        ShareCityDelete { id: i64, page: u64, sort: String },

        #[route("/share-user?:page&:sort")]
        ShareUserList { page: u64, sort: String },
        #[route("/share-user/new")]
        ShareUserNew {},
        #[route("/share-user/:id")]
        ShareUserDetail { id: i64 },
        #[route("/share-user/:id/edit?:page&:sort")]
        ShareUserEdit { id: i64, page: u64, sort: String },
        #[route("/share-user/:id/delete?:page&:sort")]
        ShareUserDelete { id: i64, page: u64, sort: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(Gateways::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Redirect `/` to the ride list.
#[component]
fn Home() -> Element {
    let nav = use_navigator();
    nav.replace(Route::RideList {
        page: 0,
        sort: String::new(),
    });
    rsx! {}
}

#[component]
fn AppLayout() -> Element {
    rsx! {
        header {
            class: "navbar",
            Link { class: "navbar-brand", to: Route::Home {}, "Shareazade" }
            nav {
                class: "navbar-entities",
                Link { to: Route::RideList { page: 0, sort: String::new() }, "Rides" }
                Link { to: Route::CityList { page: 0, sort: String::new() }, "Cities" }
                Link { to: Route::UsersList { page: 0, sort: String::new() }, "Users" }
                Link { to: Route::ShareRideList { page: 0, sort: String::new() }, "Share Rides" }
                Link { to: Route::ShareCityList { page: 0, sort: String::new() }, "Share Cities" }
                Link { to: Route::ShareUserList { page: 0, sort: String::new() }, "Share Users" }
            }
        }
        main {
            class: "page-container",
            Outlet::<Route> {}
        }
    }
}
