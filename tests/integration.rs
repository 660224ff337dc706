//! Integration tests for trellis.
//!
//! These tests drive the public API from outside the crate: widgets mounted
//! on a [`Root`], events routed through it, and the style cache and render
//! batching observed across whole trees.

use trellis::css::{Border, BorderStyle, Color, CssSize, NamedColor};
use trellis::event::DomEvent;
use trellis::ids::IdGenerator;
use trellis::property::PropertyError;
use trellis::reactive::{self, single_render};
use trellis::style::{Declarations, Styleable};
use trellis::testing::{class_names, fresh, render_root, render_to_html};
use trellis::widget::{ChildContainer, Component, Renderable};
use trellis::widgets::*;
use trellis::{Root, RootConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

// ---------------------------------------------------------------------------
// Rendering through the root
// ---------------------------------------------------------------------------

#[test]
fn test_lists_render_inside_root() {
    init_tracing();
    fresh();
    let mut root = Root::with_element_id("test");
    root.add(ListTag::with_elements(
        ListType::DlHorizontal,
        strings(&["abc", "def", "ghi", "jkl"]),
    ));
    let mut ul = ListTag::new(ListType::Ul);
    ul.add(Tag::with_text(TagType::Pre, "pre"));
    ul.add(Tag::with_text(TagType::Del, "del"));
    root.add(ul);

    insta::assert_snapshot!(
        render_root(&mut root),
        @r#"<dl class="dl-horizontal"><dt>abc</dt><dd>def</dd><dt>ghi</dt><dd>jkl</dd></dl><ul><li><pre>pre</pre></li><li><del>del</del></li></ul>"#
    );
}

#[test]
fn test_flex_panel_inside_root() {
    fresh();
    let mut root = Root::default();
    let mut flex = FlexPanel::new(Some(FlexDir::RowRev)).with_justify(FlexJustify::SpaceEvenly);
    flex.add_item(Tag::span("abc"), FlexItem::order(1));
    flex.add_item(Tag::span("def"), FlexItem::order(2));
    root.add(flex);

    insta::assert_snapshot!(
        render_root(&mut root),
        @r#"<div style="display: flex; flex-direction: row-reverse; justify-content: space-evenly;"><div style="order: 1;"><span>abc</span></div><div style="order: 2;"><span>def</span></div></div>"#
    );
}

#[test]
fn test_dropdown_ids_follow_root_prefix() {
    fresh();
    let mut root = Root::new(RootConfig::new().with_id_prefix("app_"));
    let dd = DropDown::new("Menu", Some(vec![("Home".into(), "#!/".into())]));
    assert_eq!(dd.idc(), "app_dropdown_0");
    root.add(dd);
    let html = render_root(&mut root);
    assert!(html.contains(r#"id="app_dropdown_0""#), "{html}");
    assert!(html.contains(r#"aria-labelledby="app_dropdown_0""#), "{html}");
}

#[test]
fn test_form_field_markup() {
    let ids = IdGenerator::new();
    let mut text = Text::new_with(&ids, TextInputType::Password, None, Some("Secret".into()));
    text.set_placeholder(Some("type here".into()));
    insta::assert_snapshot!(
        render_to_html(&text),
        @r#"<div class="form-group"><label class="control-label" for="kv_form_text_0">Secret</label><input class="form-control" id="kv_form_text_0" placeholder="type here" type="password"></div>"#
    );
}

#[test]
fn test_grid_and_button_classes() {
    let mut grid = ResponsiveGridPanel::new(GridSize::Md);
    grid.add(Button::new("a").with_style(ButtonStyle::Primary));
    grid.add(Button::new("b"));
    let node = grid.render();
    assert_eq!(class_names(&node), Vec::<String>::new());
    let html = node.to_html();
    assert!(html.contains(r#"<div class="col-md-6"><button class="btn btn-primary" type="button">a</button></div>"#), "{html}");
}

// ---------------------------------------------------------------------------
// Styling
// ---------------------------------------------------------------------------

#[test]
fn test_style_list_follows_write_order() {
    let mut tag = Tag::span("x");
    tag.set_color(Some(Color::named(NamedColor::Red)));
    tag.set_width(Some(CssSize::px(10.0)));
    tag.set_border(Some(Border {
        width: Some(CssSize::px(1.0)),
        style: Some(BorderStyle::Solid),
        color: Some(Color::hex(0x00ff00)),
    }));
    assert_eq!(
        render_to_html(&tag),
        r#"<span style="color: red; width: 10px; border: 1px solid #00ff00;">x</span>"#
    );
}

#[test]
fn test_style_cache_survives_repeated_renders() {
    let mut tag = Tag::span("x");
    tag.set_margin(Some(CssSize::em(1.0)));
    let first = tag.styled().style();
    let computations = tag.styled().style_computations();
    for _ in 0..5 {
        tag.render();
    }
    assert!(std::rc::Rc::ptr_eq(&first, &tag.styled().style()));
    assert_eq!(tag.styled().style_computations(), computations);

    tag.set_margin(Some(CssSize::em(2.0)));
    assert!(!std::rc::Rc::ptr_eq(&first, &tag.styled().style()));
}

#[test]
fn test_unchanged_write_keeps_cache_for_on_change_property() {
    let mut button = Button::new("a");
    button.set_width(Some(CssSize::px(40.0)));
    let before = button.styled().style();
    assert!(!button.set_disabled(false));
    assert!(std::rc::Rc::ptr_eq(&before, &button.styled().style()));

    assert!(button.set_disabled(true));
    assert!(!std::rc::Rc::ptr_eq(&before, &button.styled().style()));
}

#[test]
fn test_same_padding_twice_recomputes_style() {
    let mut tag = Tag::span("x");
    tag.set_padding(Some(CssSize::px(4.0)));
    let before = tag.styled().style();
    let computations = tag.styled().style_computations();
    tag.set_padding(Some(CssSize::px(4.0)));
    let after = tag.styled().style();
    assert!(!std::rc::Rc::ptr_eq(&before, &after));
    assert_eq!(tag.styled().style_computations(), computations + 1);
    assert_eq!(&*before, &*after);
}

#[test]
fn test_fresh_widgets_schedule_no_renders() {
    reactive::reset();
    let tag = Tag::span("x");
    let button = Button::new("a");
    assert_eq!(tag.styled().invalidations(), 0);
    assert_eq!(button.styled().invalidations(), 0);
    assert_eq!(reactive::render_passes(), 0);
    assert!(!reactive::has_dirty());
}

#[test]
fn test_inline_declarations_apply_in_one_pass() {
    reactive::reset();
    let mut tag = Tag::span("x");
    let decls = Declarations::parse_inline("width: 50%; margin-top: 2px; border: 1px dashed blue").unwrap();
    let passes = reactive::render_passes();
    tag.styled_mut().apply(&decls).unwrap();
    assert_eq!(reactive::render_passes(), passes + 1);
    assert_eq!(
        render_to_html(&tag),
        r#"<span style="width: 50%; margin-top: 2px; border: 1px dashed blue;">x</span>"#
    );
}

#[test]
fn test_unknown_style_property_is_an_error() {
    let mut tag = Tag::span("x");
    let err = tag
        .styled_mut()
        .apply(&Declarations::new().text("float", "left"))
        .unwrap_err();
    assert_eq!(err, PropertyError::UnknownProperty("float".into()));
}

#[cfg(feature = "macros")]
#[test]
fn test_css_macro_builds_declarations() {
    let mut tag = Tag::span("x");
    let decls = trellis::css! {
        width: 10px;
        color: #f00;
        border: 2px solid red;
        opacity: 0.5;
    };
    tag.styled_mut().apply(&decls).unwrap();
    assert_eq!(tag.width(), Some(CssSize::px(10.0)));
    assert_eq!(tag.color(), Some(Color::hex(0xff0000)));
    assert_eq!(tag.opacity(), Some(0.5));
}

// ---------------------------------------------------------------------------
// Render batching
// ---------------------------------------------------------------------------

#[test]
fn test_single_render_collapses_writes() {
    reactive::reset();
    let mut button = Button::new("a");
    let passes = reactive::render_passes();
    single_render(|| {
        button.set_text("b");
        button.set_width(Some(CssSize::px(100.0)));
        button.set_button_style(ButtonStyle::Danger);
        button.set_disabled(true);
    });
    assert_eq!(reactive::render_passes(), passes + 1);
}

#[test]
fn test_root_flushes_once_per_batch() {
    fresh();
    let mut root = Root::default();
    let tag = Tag::with_text(TagType::P, "a");
    let id = tag.id();
    root.add(tag);
    assert!(root.flush());

    root.with_component_mut::<Tag, _>(id, |t| {
        single_render(|| {
            t.set_text(Some("b".into()));
            t.set_align(Some(Align::Center));
            t.set_width(Some(CssSize::percent(50.0)));
        })
    });
    assert!(root.flush());
    assert!(!root.flush());
    assert_eq!(root.render_count(), 2);
    assert_eq!(
        root.inner_html(),
        r#"<p class="text-center" style="width: 50%;">b</p>"#
    );
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[test]
fn test_input_event_reaches_nested_field() {
    init_tracing();
    fresh();
    let mut root = Root::default();
    let mut panel = SimplePanel::with_classes(["well"]);
    let text = Text::new(TextInputType::Text, None, Some("Name".into()));
    let input_id = text.input().id();
    panel.add(text);
    root.add(panel);

    assert!(root.dispatch(input_id, &DomEvent::input("Ada")));
    let value = root.with_component_mut::<TextInput, _>(input_id, |i| i.value());
    assert_eq!(value.flatten().as_deref(), Some("Ada"));
}

#[test]
fn test_checkbox_click_through_queue() {
    fresh();
    let mut root = Root::default();
    let check = CheckInput::checkbox(false);
    let id = check.id();
    root.add(check);
    root.post(id, DomEvent::click().with_checked(true));
    assert_eq!(root.pending_events(), 1);
    root.process_events();
    let checked = root.with_component_mut::<CheckInput, _>(id, |c| c.value());
    assert_eq!(checked, Some(true));
    assert_eq!(root.pending_events(), 0);
}

#[test]
fn test_dropdown_toggles_on_click() {
    fresh();
    let mut root = Root::default();
    let dd = DropDown::new("Menu", None);
    let id = dd.id();
    root.add(dd);
    root.dispatch(id, &DomEvent::click());
    let open = root.with_component_mut::<DropDown, _>(id, |d| d.is_open());
    assert_eq!(open, Some(true));
    assert!(render_root(&mut root).starts_with(r#"<div class="open dropdown">"#));
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn test_root_config_from_json() {
    let config: RootConfig =
        serde_json::from_str(r#"{ "element_id": "app", "fixed": true, "id_prefix": "t_" }"#).unwrap();
    let root = Root::new(config);
    assert_eq!(root.render().to_html(), r#"<div class="container" id="app"></div>"#);
    assert_eq!(trellis::ids::next_element_id("x"), "t_x_0");
}
