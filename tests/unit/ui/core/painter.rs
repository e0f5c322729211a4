use super::*;
use crate::ui::backend::test::TestBackend;
use crate::ui::core::geom::PercentRect;

fn rect(x: i32, y: i32, w: i32, h: i32) -> CellRect {
    CellRect::new(Vec2::new(x, y), Vec2::new(w, h))
}

fn render(grid: Grid, draw: impl FnOnce(&mut RenderLayer)) -> TestBackend {
    let mut backend = TestBackend::new(grid.width(), grid.height());
    let mut layer = begin_layer(grid);
    draw(&mut layer);
    end_layer(layer, &mut backend).unwrap();
    backend
}

#[test]
fn frame_draws_edges_and_corners() {
    let grid = Grid::new(10, 6).unwrap();
    let backend = render(grid, |layer| layer.draw_frame(rect(0, 0, 6, 4), ""));
    let buf = backend.buffer();
    assert_eq!(buf.row(0), "┌────┐    ");
    assert_eq!(buf.row(1), "│    │    ");
    assert_eq!(buf.row(2), "│    │    ");
    assert_eq!(buf.row(3), "└────┘    ");
    assert_eq!(buf.row(4), "          ");
}

#[test]
fn corners_always_get_corner_glyphs() {
    for w in 2..8 {
        for h in 2..6 {
            let r = rect(3, 2, w, h);
            let right = r.right() - 1;
            let bottom = r.bottom() - 1;
            assert_eq!(frame_glyph(r, Vec2::new(3, 2)), Some(TOP_LEFT));
            assert_eq!(frame_glyph(r, Vec2::new(right, 2)), Some(TOP_RIGHT));
            assert_eq!(frame_glyph(r, Vec2::new(3, bottom)), Some(BOTTOM_LEFT));
            assert_eq!(frame_glyph(r, Vec2::new(right, bottom)), Some(BOTTOM_RIGHT));
        }
    }
}

#[test]
fn frame_glyph_is_none_inside_and_outside() {
    let r = rect(0, 0, 4, 4);
    assert_eq!(frame_glyph(r, Vec2::new(1, 1)), None);
    assert_eq!(frame_glyph(r, Vec2::new(4, 0)), None);
    assert_eq!(frame_glyph(r, Vec2::new(1, 0)), Some(HORIZONTAL));
    assert_eq!(frame_glyph(r, Vec2::new(0, 2)), Some(VERTICAL));
}

#[test]
fn frame_title_overwrites_top_edge() {
    let grid = Grid::new(12, 3).unwrap();
    let backend = render(grid, |layer| layer.draw_frame(rect(0, 0, 10, 3), "Log"));
    assert_eq!(backend.buffer().row(0), "┌Log─────┐  ");
}

#[test]
fn one_column_frame_in_the_last_column_has_no_title() {
    let grid = Grid::new(10, 4).unwrap();
    let mut root = View::new("root", PercentRect::FULL, Vec2::ZERO);
    root.align(&grid).unwrap();
    root.push_aligned(
        View::new("narrow", PercentRect::new(Vec2::new(90, 0), Vec2::new(10, 100)), Vec2::ZERO),
        &grid,
    )
    .unwrap();
    assert_eq!(root.children()[0].rect(), Some(rect(9, 0, 1, 4)));

    let mut layer = RenderLayer::begin(grid);
    layer.draw_view(&root);
    assert!(layer.cmds().iter().all(|c| grid.bounds().contains(c.pos)));
    assert!(layer.cmds().iter().all(|c| c.text != "narrow"));
    assert!(layer.cmds().iter().any(|c| c.text == "root"));
}

#[test]
fn frame_on_empty_rect_draws_nothing() {
    let mut layer = RenderLayer::begin(Grid::DEFAULT);
    layer.draw_frame(rect(0, 0, 0, 5), "x");
    assert!(layer.cmds().is_empty());
}

#[test]
fn draw_text_slices_fixed_width_lines() {
    let mut layer = RenderLayer::begin(Grid::new(40, 20).unwrap());
    let message = "a".repeat(10) + &"b".repeat(10) + "ccccc";
    layer.draw_text(rect(2, 3, 10, 5), &message);

    assert_eq!(
        layer.cmds(),
        &[
            PaintCmd {
                pos: Vec2::new(2, 3),
                text: "a".repeat(10)
            },
            PaintCmd {
                pos: Vec2::new(2, 4),
                text: "b".repeat(10)
            },
            PaintCmd {
                pos: Vec2::new(2, 5),
                text: "ccccc".to_string()
            },
        ]
    );
}

#[test]
fn draw_text_line_count_is_ceil_len_over_width_capped_by_height() {
    let grid = Grid::new(40, 20).unwrap();
    for (len, w, h, expected) in [(25, 10, 5, 3), (30, 10, 5, 3), (100, 10, 5, 4), (7, 3, 10, 3), (5, 5, 1, 0)] {
        let mut layer = RenderLayer::begin(grid);
        layer.draw_text(rect(0, 0, w, h), &"x".repeat(len));
        assert_eq!(layer.cmds().len(), expected, "len={len} w={w} h={h}");
    }
}

#[test]
fn draw_text_treats_zero_width_as_one_column() {
    let mut layer = RenderLayer::begin(Grid::new(10, 10).unwrap());
    layer.draw_text(rect(1, 1, 0, 4), "abc");
    let lines: Vec<&str> = layer.cmds().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(lines, vec!["a", "b", "c"]);
}

#[test]
fn draw_view_renders_parent_before_children() {
    let grid = Grid::new(40, 20).unwrap();
    let mut root = View::new("root", PercentRect::FULL, Vec2::ZERO);
    root.align(&grid).unwrap();
    root.push_aligned(
        View::new("child", PercentRect::new(Vec2::new(25, 25), Vec2::new(50, 50)), Vec2::ZERO),
        &grid,
    )
    .unwrap();

    let mut layer = RenderLayer::begin(grid);
    layer.draw_view(&root);
    let cmds = layer.cmds();
    let root_title = cmds.iter().position(|c| c.text == "root").unwrap();
    let child_first = cmds.iter().position(|c| c.pos == Vec2::new(10, 5)).unwrap();
    assert_eq!(cmds[0].pos, Vec2::ZERO);
    assert!(root_title < child_first);
    assert_eq!(cmds.last().map(|c| c.text.as_str()), Some("child"));
}

#[test]
fn draw_view_skips_unaligned_views() {
    let root = View::new("root", PercentRect::FULL, Vec2::ZERO);
    let mut layer = RenderLayer::begin(Grid::DEFAULT);
    layer.draw_view(&root);
    assert!(layer.cmds().is_empty());
}

#[test]
fn end_layer_hands_over_one_frame() {
    let grid = Grid::new(4, 4).unwrap();
    let backend = render(grid, |layer| layer.text(Vec2::new(1, 1), "hi"));
    assert_eq!(backend.frames(), 1);
    assert_eq!(backend.buffer().row(1), " hi ");
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "outside")]
fn drawing_off_the_grid_is_a_contract_violation() {
    let mut layer = RenderLayer::begin(Grid::new(4, 4).unwrap());
    layer.text(Vec2::new(4, 0), "x");
}
