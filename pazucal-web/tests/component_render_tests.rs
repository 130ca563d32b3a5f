use futures::executor::block_on;
use pazucal_web::components::footer::Footer;
use pazucal_web::components::header::Header;
use pazucal_web::components::modal::Modal;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};

#[test]
fn header_renders_actions_and_badge() {
    let props = pazucal_web::components::header::Props {
        unread: 3,
        on_open_notifications: Callback::noop(),
        on_open_links: Callback::noop(),
        on_logout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("notification-btn"));
    assert!(html.contains("notification-badge"));
    assert!(html.contains('3'));
    assert!(html.contains("logout-btn"));
}

#[test]
fn header_hides_badge_at_zero_unread() {
    let props = pazucal_web::components::header::Props {
        unread: 0,
        on_open_notifications: Callback::noop(),
        on_open_links: Callback::noop(),
        on_logout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(!html.contains("notification-badge"));
}

#[test]
fn footer_renders_copy() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer>"));
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    let open_props = pazucal_web::components::modal::Props {
        open: true,
        title: AttrValue::from("Title"),
        on_close: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal__header"));
    assert!(html.contains("Title"));

    let closed_props = pazucal_web::components::modal::Props {
        open: false,
        title: AttrValue::from("Title"),
        on_close: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}
