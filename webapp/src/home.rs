use dioxus::prelude::*;

use crate::{
    components::footer::Footer,
    sections::{About, Blog, Contact, Hero, Projects, Skills},
};

// the whole site is one page; sections render in navigation order
#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            Hero {}
            About {}
            Skills {}
            Projects {}
            Blog {}
            Contact {}
        }
        Footer {}
    }
}
