use tracing::debug;

// in-page anchors, in page order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Skills,
    Projects,
    Blog,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Skills,
        Anchor::Projects,
        Anchor::Blog,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Skills => "skills",
            Anchor::Projects => "projects",
            Anchor::Blog => "blog",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Skills => "Skills",
            Anchor::Projects => "Projects",
            Anchor::Blog => "Blog",
            Anchor::Contact => "Contact",
        }
    }

    // id of the animated wrapper inside the section, the element whose visibility is watched
    pub fn content_id(self) -> &'static str {
        match self {
            Anchor::Home => "home-content",
            Anchor::About => "about-content",
            Anchor::Skills => "skills-content",
            Anchor::Projects => "projects-content",
            Anchor::Blog => "blog-content",
            Anchor::Contact => "contact-content",
        }
    }

    // everything below the hero, as listed in the navbar and footer
    pub fn sections() -> impl Iterator<Item = Anchor> {
        Anchor::ALL.into_iter().skip(1)
    }
}

// the scrollable surface the page lives in
pub trait Viewport {
    // distance from the top of the document to the anchor, if it exists
    fn offset_top(&self, anchor_id: &str) -> Option<f64>;

    // smooth-scroll so that the document position `top` sits at the top of the viewport
    fn scroll_to(&mut self, top: f64);
}

// land the region just under the sticky header
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    (offset_top - header_offset).max(0.0)
}

// scroll to the named anchor
//
// a missing anchor is not an error, the viewport is left alone and false is returned
pub fn navigate<V: Viewport + ?Sized>(viewport: &mut V, anchor_id: &str, header_offset: f64) -> bool {
    match viewport.offset_top(anchor_id) {
        Some(offset_top) => {
            let top = scroll_target(offset_top, header_offset);
            debug!(anchor_id, top, "scrolling to anchor");
            viewport.scroll_to(top);
            true
        }
        None => {
            debug!(anchor_id, "anchor not found, ignoring navigation");
            false
        }
    }
}

pub fn scroll_to_top<V: Viewport + ?Sized>(viewport: &mut V) {
    viewport.scroll_to(0.0);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeViewport {
        anchors: HashMap<&'static str, f64>,
        scrolls: Vec<f64>,
    }

    impl Viewport for FakeViewport {
        fn offset_top(&self, anchor_id: &str) -> Option<f64> {
            self.anchors.get(anchor_id).copied()
        }

        fn scroll_to(&mut self, top: f64) {
            self.scrolls.push(top);
        }
    }

    fn page() -> FakeViewport {
        FakeViewport {
            anchors: HashMap::from([("home", 0.0), ("about", 900.0), ("contact", 4200.0)]),
            scrolls: vec![],
        }
    }

    #[test]
    fn scrolls_below_header() {
        let mut viewport = page();

        assert!(navigate(&mut viewport, "about", 80.0));
        assert!(navigate(&mut viewport, "contact", 80.0));

        assert_eq!(viewport.scrolls, vec![820.0, 4120.0]);
    }

    #[test]
    fn target_never_negative() {
        let mut viewport = page();

        assert!(navigate(&mut viewport, "home", 80.0));
        assert_eq!(viewport.scrolls, vec![0.0]);
        assert_eq!(scroll_target(30.0, 80.0), 0.0);
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let mut viewport = page();

        assert!(!navigate(&mut viewport, "pricing", 80.0));
        assert!(viewport.scrolls.is_empty());
    }

    #[test]
    fn back_to_top() {
        let mut viewport = page();

        scroll_to_top(&mut viewport);
        assert_eq!(viewport.scrolls, vec![0.0]);
    }

    #[test]
    fn anchor_ids_are_distinct() {
        let mut ids: Vec<_> = Anchor::ALL
            .into_iter()
            .flat_map(|a| [a.id(), a.content_id()])
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 2 * Anchor::ALL.len());

        let sections: Vec<_> = Anchor::sections().map(Anchor::id).collect();
        assert_eq!(sections, vec!["about", "skills", "projects", "blog", "contact"]);
    }
}
