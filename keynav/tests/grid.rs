use keynav::{
    next_grid_index, Document, Element, Event, EventResult, GridMatrix, Intent, Key,
    KeyNavigationGridConfig, KeyNavigationGridController, Modifiers, RowsOf,
};

/// Six rows of three cells. The last row mixes a plain cell, a cell with one
/// button and a cell with two buttons.
fn grid_document() -> Document {
    let mut rows: Vec<Element> = (0..5)
        .map(|r| {
            Element::div().id(format!("row-{r}")).children((0..3).map(|c| {
                let n = r * 3 + c;
                Element::button(format!("{n}")).id(format!("cell-{n}"))
            }))
        })
        .collect();
    rows.push(
        Element::div()
            .id("row-5")
            .child(Element::div().id("cell-15").text("15"))
            .child(
                Element::div()
                    .id("cell-16")
                    .child(Element::button("16").id("btn-16")),
            )
            .child(
                Element::div()
                    .id("cell-17")
                    .child(Element::button("17-1").id("btn-17-1"))
                    .child(Element::button("17-2").id("btn-17-2")),
            ),
    );

    Document::new(
        Element::new("grid-host")
            .id("host")
            .child(Element::section().id("grid").children(rows)),
    )
}

fn grid_controller() -> KeyNavigationGridController<RowsOf> {
    KeyNavigationGridController::new(
        "host",
        RowsOf::new("grid"),
        KeyNavigationGridConfig::default(),
    )
}

/// Document plus a controller initialized the lazy way, by hovering.
fn setup() -> (Document, KeyNavigationGridController<RowsOf>) {
    let mut doc = grid_document();
    let mut grid = grid_controller();
    grid.handle_event(&mut doc, &Event::mouse_over("host"));
    (doc, grid)
}

fn cell(i: usize) -> String {
    format!("cell-{i}")
}

fn tabindex(doc: &Document, i: usize) -> Option<i32> {
    doc.tabindex(&cell(i))
}

fn press(
    doc: &mut Document,
    grid: &mut KeyNavigationGridController<RowsOf>,
    key: Key,
) -> EventResult {
    grid.handle_event(doc, &Event::key("grid", key))
}

fn press_command(
    doc: &mut Document,
    grid: &mut KeyNavigationGridController<RowsOf>,
    key: Key,
) -> EventResult {
    let modifiers = Modifiers {
        ctrl: true,
        meta: true,
        ..Default::default()
    };
    grid.handle_event(doc, &Event::key_with("grid", key, modifiers))
}

fn zero_count(doc: &Document) -> usize {
    (0..18).filter(|i| tabindex(doc, *i) == Some(0)).count()
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_initial_tabindex_after_first_hover() {
    let (doc, grid) = setup();

    assert!(grid.is_initialized());
    assert_eq!(tabindex(&doc, 0), Some(0));
    assert_eq!(tabindex(&doc, 8), Some(-1));
    assert_eq!(zero_count(&doc), 1);
}

#[test]
fn test_no_tabindex_before_first_interaction() {
    let doc = grid_document();
    let grid = grid_controller();

    assert!(!grid.is_initialized());
    assert_eq!(tabindex(&doc, 0), None);
}

#[test]
fn test_explicit_initialize_is_idempotent() {
    let mut doc = grid_document();
    let mut grid = grid_controller();

    assert!(grid.initialize(&mut doc));
    press(&mut doc, &mut grid, Key::Right);
    assert!(!grid.initialize(&mut doc));

    // Second call must not pull the active cell back to the start
    assert_eq!(tabindex(&doc, 1), Some(0));
    assert_eq!(tabindex(&doc, 0), Some(-1));
}

#[test]
fn test_late_rendered_rows_are_picked_up() {
    let mut doc = Document::new(
        Element::new("grid-host")
            .id("host")
            .child(Element::section().id("grid")),
    );
    let mut grid = grid_controller();

    grid.handle_event(&mut doc, &Event::mouse_over("host"));
    assert!(!grid.is_initialized());

    doc.append_child(
        "grid",
        Element::div()
            .id("late-row")
            .child(Element::button("a").id("late-a"))
            .child(Element::button("b").id("late-b")),
    );
    grid.handle_event(&mut doc, &Event::mouse_over("host"));

    assert!(grid.is_initialized());
    assert_eq!(doc.tabindex("late-a"), Some(0));
    assert_eq!(doc.tabindex("late-b"), Some(-1));
}

#[test]
fn test_rows_appended_after_initialize_get_roving_tabindex() {
    let mut doc = Document::new(
        Element::new("grid-host").id("host").child(
            Element::section().id("grid").child(
                Element::div()
                    .id("row-0")
                    .children((0..3).map(|n| Element::button(format!("{n}")).id(cell(n)))),
            ),
        ),
    );
    let mut grid = grid_controller();
    grid.handle_event(&mut doc, &Event::mouse_over("host"));

    // No mutation event: the host renders a second row silently
    doc.append_child(
        "grid",
        Element::div()
            .id("row-1")
            .children((3..6).map(|n| Element::button(format!("{n}")).id(cell(n)))),
    );
    press(&mut doc, &mut grid, Key::Down);

    let tabindexes: Vec<_> = (0..6).map(|i| tabindex(&doc, i)).collect();
    assert_eq!(
        tabindexes,
        vec![Some(-1), Some(-1), Some(-1), Some(0), Some(-1), Some(-1)]
    );
}

// ============================================================================
// Pointer Activation
// ============================================================================

#[test]
fn test_mousedown_activates_cell() {
    let (mut doc, mut grid) = setup();

    let result = grid.handle_event(&mut doc, &Event::mouse_down(cell(2)));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(tabindex(&doc, 0), Some(-1));
    assert_eq!(tabindex(&doc, 1), Some(-1));
    assert_eq!(tabindex(&doc, 2), Some(0));
    assert_eq!(zero_count(&doc), 1);
}

#[test]
fn test_mousedown_on_nested_button_activates_its_cell() {
    let (mut doc, mut grid) = setup();

    grid.handle_event(&mut doc, &Event::mouse_down("btn-17-2"));

    assert_eq!(tabindex(&doc, 17), Some(0));
    assert_eq!(tabindex(&doc, 0), Some(-1));
    assert_eq!(doc.active_element(), Some("btn-17-1"));
}

#[test]
fn test_right_button_does_not_activate() {
    let (mut doc, mut grid) = setup();

    let event = Event::MouseDown {
        target: cell(4),
        button: keynav::MouseButton::Right,
    };
    assert_eq!(grid.handle_event(&mut doc, &event), EventResult::Ignored);
    assert_eq!(tabindex(&doc, 0), Some(0));
}

// ============================================================================
// Arrow Keys
// ============================================================================

#[test]
fn test_arrow_key_navigation() {
    let (mut doc, mut grid) = setup();

    press(&mut doc, &mut grid, Key::Right);
    press(&mut doc, &mut grid, Key::Right);
    assert_eq!(tabindex(&doc, 0), Some(-1));
    assert_eq!(tabindex(&doc, 1), Some(-1));
    assert_eq!(tabindex(&doc, 2), Some(0));

    press(&mut doc, &mut grid, Key::Left);
    press(&mut doc, &mut grid, Key::Left);
    assert_eq!(tabindex(&doc, 0), Some(0));
    assert_eq!(tabindex(&doc, 1), Some(-1));
    assert_eq!(tabindex(&doc, 2), Some(-1));

    press(&mut doc, &mut grid, Key::Down);
    press(&mut doc, &mut grid, Key::Down);
    assert_eq!(tabindex(&doc, 0), Some(-1));
    assert_eq!(tabindex(&doc, 3), Some(-1));
    assert_eq!(tabindex(&doc, 6), Some(0));

    press(&mut doc, &mut grid, Key::Up);
    press(&mut doc, &mut grid, Key::Up);
    assert_eq!(tabindex(&doc, 0), Some(0));
    assert_eq!(tabindex(&doc, 3), Some(-1));
    assert_eq!(tabindex(&doc, 6), Some(-1));
}

#[test]
fn test_inline_moves_stop_at_row_edges() {
    let (mut doc, mut grid) = setup();

    assert_eq!(press(&mut doc, &mut grid, Key::Left), EventResult::Ignored);
    assert_eq!(tabindex(&doc, 0), Some(0));

    for _ in 0..5 {
        press(&mut doc, &mut grid, Key::Right);
    }
    // Stays on the last cell of the first row, never wraps into row 1
    assert_eq!(tabindex(&doc, 2), Some(0));
    assert_eq!(tabindex(&doc, 3), Some(-1));
}

#[test]
fn test_block_moves_stop_at_first_and_last_row() {
    let (mut doc, mut grid) = setup();

    assert_eq!(press(&mut doc, &mut grid, Key::Up), EventResult::Ignored);
    for _ in 0..10 {
        press(&mut doc, &mut grid, Key::Down);
    }
    assert_eq!(tabindex(&doc, 15), Some(0));
    assert_eq!(grid.active_position(&doc), Some((5, 0)));
}

#[test]
fn test_key_target_inside_cell_navigates_from_that_cell() {
    let (mut doc, mut grid) = setup();

    // Focus sits on a button inside cell 16 although the tracked cell is 0
    grid.handle_event(&mut doc, &Event::key("btn-16", Key::Up));

    assert_eq!(tabindex(&doc, 13), Some(0));
    assert_eq!(tabindex(&doc, 0), Some(-1));
}

// ============================================================================
// WCAG Shortcuts
// ============================================================================

#[test]
fn test_key_navigation_shortcuts() {
    let (mut doc, mut grid) = setup();

    // last in row
    press(&mut doc, &mut grid, Key::End);
    assert_eq!(tabindex(&doc, 0), Some(-1));
    assert_eq!(tabindex(&doc, 1), Some(-1));
    assert_eq!(tabindex(&doc, 2), Some(0));

    // first in row
    press(&mut doc, &mut grid, Key::Home);
    assert_eq!(tabindex(&doc, 0), Some(0));
    assert_eq!(tabindex(&doc, 1), Some(-1));
    assert_eq!(tabindex(&doc, 2), Some(-1));

    // last cell in grid
    press_command(&mut doc, &mut grid, Key::End);
    assert_eq!(tabindex(&doc, 0), Some(-1));
    assert_eq!(tabindex(&doc, 17), Some(0));

    // first cell in grid
    press_command(&mut doc, &mut grid, Key::Home);
    assert_eq!(tabindex(&doc, 0), Some(0));
    assert_eq!(tabindex(&doc, 17), Some(-1));

    // page down
    press(&mut doc, &mut grid, Key::PageDown);
    assert_eq!(tabindex(&doc, 0), Some(-1));
    assert_eq!(tabindex(&doc, 12), Some(0));

    // page up
    press(&mut doc, &mut grid, Key::PageUp);
    assert_eq!(tabindex(&doc, 0), Some(0));
    assert_eq!(tabindex(&doc, 12), Some(-1));
}

#[test]
fn test_grid_home_end_from_any_cell() {
    let (mut doc, mut grid) = setup();

    for start in [4, 8, 13, 16] {
        grid.handle_event(&mut doc, &Event::mouse_down(cell(start)));
        press_command(&mut doc, &mut grid, Key::Home);
        assert_eq!(grid.active_index(&doc), Some(0), "home from {start}");

        grid.handle_event(&mut doc, &Event::mouse_down(cell(start)));
        press_command(&mut doc, &mut grid, Key::End);
        assert_eq!(grid.active_index(&doc), Some(17), "end from {start}");
    }
}

#[test]
fn test_meta_alone_escalates_home() {
    let (mut doc, mut grid) = setup();
    grid.handle_event(&mut doc, &Event::mouse_down(cell(10)));

    grid.handle_event(&mut doc, &Event::key_with("grid", Key::Home, Modifiers::meta()));

    assert_eq!(tabindex(&doc, 0), Some(0));
}

// ============================================================================
// Paging
// ============================================================================

#[test]
fn test_page_does_not_move_beyond_bounds() {
    let (mut doc, mut grid) = setup();

    // limit reached should keep the first cell
    press(&mut doc, &mut grid, Key::PageUp);
    press(&mut doc, &mut grid, Key::PageUp);
    press(&mut doc, &mut grid, Key::PageUp);
    assert_eq!(tabindex(&doc, 0), Some(0));
    assert_eq!(tabindex(&doc, 12), Some(-1));
    assert_eq!(tabindex(&doc, 15), Some(-1));

    // limit reached should land on the last row
    press(&mut doc, &mut grid, Key::PageDown);
    press(&mut doc, &mut grid, Key::PageDown);
    press(&mut doc, &mut grid, Key::PageDown);
    assert_eq!(tabindex(&doc, 0), Some(-1));
    assert_eq!(tabindex(&doc, 12), Some(-1));
    assert_eq!(tabindex(&doc, 15), Some(0));
}

#[test]
fn test_page_stride_is_configurable() {
    let mut doc = grid_document();
    let mut grid = KeyNavigationGridController::new(
        "host",
        RowsOf::new("grid"),
        KeyNavigationGridConfig::new().page_stride(3),
    );
    grid.initialize(&mut doc);

    press(&mut doc, &mut grid, Key::PageDown);
    assert_eq!(grid.active_position(&doc), Some((3, 0)));
    press(&mut doc, &mut grid, Key::PageDown);
    assert_eq!(grid.active_position(&doc), Some((5, 0)));
    assert_eq!(press(&mut doc, &mut grid, Key::PageDown), EventResult::Ignored);
    assert_eq!(grid.active_position(&doc), Some((5, 0)));
}

// ============================================================================
// Direction
// ============================================================================

#[test]
fn test_rtl_inverts_inline_keys() {
    let (mut doc, mut grid) = setup();
    doc.set_attribute("host", "dir", "rtl");

    press(&mut doc, &mut grid, Key::Left);
    press(&mut doc, &mut grid, Key::Left);
    assert_eq!(tabindex(&doc, 0), Some(-1));
    assert_eq!(tabindex(&doc, 1), Some(-1));
    assert_eq!(tabindex(&doc, 2), Some(0));

    press(&mut doc, &mut grid, Key::Right);
    press(&mut doc, &mut grid, Key::Right);
    assert_eq!(tabindex(&doc, 0), Some(0));
    assert_eq!(tabindex(&doc, 1), Some(-1));
    assert_eq!(tabindex(&doc, 2), Some(-1));
}

#[test]
fn test_rtl_keeps_block_keys() {
    let (mut doc, mut grid) = setup();
    doc.set_attribute("host", "dir", "rtl");

    press(&mut doc, &mut grid, Key::Down);
    assert_eq!(tabindex(&doc, 3), Some(0));
}

#[test]
fn test_direction_read_fresh_on_each_event() {
    let (mut doc, mut grid) = setup();

    press(&mut doc, &mut grid, Key::Right);
    assert_eq!(tabindex(&doc, 1), Some(0));

    doc.set_attribute("host", "dir", "rtl");
    press(&mut doc, &mut grid, Key::Right);
    assert_eq!(tabindex(&doc, 0), Some(0));
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_first_focusable_item_in_cell() {
    let (mut doc, mut grid) = setup();

    press_command(&mut doc, &mut grid, Key::End);

    assert_eq!(tabindex(&doc, 17), Some(0));
    assert_eq!(doc.active_element(), Some("btn-17-1"));
    assert_ne!(doc.active_element(), Some("btn-17-2"));
}

#[test]
fn test_focus_falls_back_to_cell_without_focusable_children() {
    let (mut doc, mut grid) = setup();

    grid.handle_event(&mut doc, &Event::mouse_down(cell(15)));

    assert_eq!(doc.active_element(), Some("cell-15"));
}

#[test]
fn test_unmanaged_focus_leaves_dom_focus_alone() {
    let mut doc = grid_document();
    let mut grid = KeyNavigationGridController::new(
        "host",
        RowsOf::new("grid"),
        KeyNavigationGridConfig::new().manage_focus(false),
    );
    grid.initialize(&mut doc);

    press(&mut doc, &mut grid, Key::Right);

    assert_eq!(tabindex(&doc, 1), Some(0));
    assert_eq!(doc.active_element(), None);
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_key_change_notification_bubbles_to_host() {
    let (mut doc, mut grid) = setup();

    press(&mut doc, &mut grid, Key::Right);

    let events: Vec<_> = doc.events_for("host").collect();
    assert_eq!(events.len(), 1);
    let detail = &events[0].detail;
    assert_eq!(detail.active_item, "cell-1");
    assert_eq!(detail.previous_item.as_deref(), Some("cell-0"));
    assert_eq!(detail.code, Some(Key::Right));
    assert!(!detail.meta_key);
    assert_eq!(detail.key_list_items, "keyGridCells");
    assert_eq!(events[0].path.first().map(String::as_str), Some("cell-1"));
}

#[test]
fn test_ignored_keys_change_nothing() {
    let (mut doc, mut grid) = setup();
    doc.take_events();

    let result = press(&mut doc, &mut grid, Key::Char('a'));

    assert_eq!(result, EventResult::Ignored);
    assert!(doc.events().is_empty());
    assert_eq!(tabindex(&doc, 0), Some(0));
    assert_eq!(zero_count(&doc), 1);
}

#[test]
fn test_events_outside_host_are_ignored() {
    let mut doc = Document::new(
        Element::div()
            .id("page")
            .child(grid_document().root().clone())
            .child(Element::button("elsewhere").id("elsewhere")),
    );
    let mut grid = grid_controller();
    grid.initialize(&mut doc);
    doc.take_events();

    let result = grid.handle_event(&mut doc, &Event::key("elsewhere", Key::Right));

    assert_eq!(result, EventResult::Ignored);
    assert!(doc.events().is_empty());
}

// ============================================================================
// Membership Changes
// ============================================================================

#[test]
fn test_mutation_resyncs_when_active_row_removed() {
    let (mut doc, mut grid) = setup();
    press_command(&mut doc, &mut grid, Key::End);

    doc.remove("row-5");
    grid.handle_event(&mut doc, &Event::Mutation { target: "grid".into() });

    assert_eq!(grid.active_cell(&doc).as_deref(), Some("cell-0"));
    assert_eq!(tabindex(&doc, 0), Some(0));
    assert_eq!((0..15).filter(|i| tabindex(&doc, *i) == Some(0)).count(), 1);
}

#[test]
fn test_exactly_one_active_cell_after_mixed_operations() {
    let (mut doc, mut grid) = setup();
    let keys = [
        Key::Right,
        Key::Down,
        Key::PageDown,
        Key::End,
        Key::Left,
        Key::Up,
        Key::PageUp,
        Key::Home,
        Key::Down,
    ];

    for (i, key) in keys.iter().cycle().take(60).enumerate() {
        if i % 7 == 0 {
            grid.handle_event(&mut doc, &Event::mouse_down(cell((i * 5) % 18)));
        } else {
            press(&mut doc, &mut grid, *key);
        }
        assert_eq!(zero_count(&doc), 1, "after step {i}");
    }
}

// ============================================================================
// Matrix Arithmetic
// ============================================================================

fn ragged() -> GridMatrix {
    GridMatrix::new(vec![
        vec!["a".into(), "b".into(), "c".into()],
        vec!["d".into()],
        vec![],
        vec!["e".into(), "f".into()],
    ])
}

#[test]
fn test_matrix_skips_empty_rows() {
    let matrix = ragged();

    assert_eq!(matrix.row_count(), 3);
    assert_eq!(matrix.len(), 6);
    assert_eq!(matrix.position(4), Some((2, 0)));
    assert_eq!(matrix.index(2, 1), Some(5));
    assert_eq!(matrix.index(1, 1), None);
    assert_eq!(matrix.position(6), None);
}

#[test]
fn test_block_moves_clamp_to_shorter_rows() {
    let matrix = ragged();

    // c (0,2) down into the single-cell row lands on d
    assert_eq!(next_grid_index(&matrix, 2, Intent::NextBlock, 4), Some(3));
    // f (2,1) up lands on d
    assert_eq!(next_grid_index(&matrix, 5, Intent::PrevBlock, 4), Some(3));
    // d down keeps column 0
    assert_eq!(next_grid_index(&matrix, 3, Intent::NextBlock, 4), Some(4));
}

#[test]
fn test_row_home_end_stay_in_row() {
    let matrix = ragged();

    assert_eq!(next_grid_index(&matrix, 4, Intent::RowEnd, 4), Some(5));
    assert_eq!(next_grid_index(&matrix, 5, Intent::RowHome, 4), Some(4));
    assert_eq!(next_grid_index(&matrix, 1, Intent::GridEnd, 4), Some(5));
}

#[test]
fn test_empty_matrix_has_no_moves() {
    let matrix = GridMatrix::default();

    assert_eq!(next_grid_index(&matrix, 0, Intent::NextInline, 4), None);
}
