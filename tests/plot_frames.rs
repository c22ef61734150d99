//! Whole-frame checks for the plotter on a captured terminal.

use termgfx::{Canvas, HeadlessTerminal, PlotGraph};

fn graph(width: usize, height: usize) -> PlotGraph<HeadlessTerminal> {
    let canvas = Canvas::new(HeadlessTerminal::new(width, height)).unwrap();
    PlotGraph::new(canvas).unwrap()
}

fn cell(rows: &[String], x: usize, y: usize) -> char {
    rows[y].as_bytes()[x] as char
}

#[test_log::test]
fn peak_series_on_80x24() {
    let mut plot = graph(80, 24);
    plot.plot_points(&[0.0, 5.0, 10.0, 5.0, 0.0], 0.0, 10.0, "Value").unwrap();
    let rows = plot.canvas().framebuffer().rows();

    for (x, y) in [(6, 22), (8, 12), (10, 2), (12, 12), (14, 22)] {
        assert_eq!(cell(&rows, x, y), '*', "sample at ({x}, {y})");
    }
    assert_eq!(cell(&rows, 9, 5), '/');
    assert_eq!(cell(&rows, 11, 7), '\\');

    // Samples on the axis cover two of the thirty ticks.
    assert_eq!(rows[22].matches('+').count(), 28);
    assert_eq!(rows[23].split_whitespace().count(), 10);
    assert_eq!(rows[23].split_whitespace().last(), Some("30"));

    assert_eq!(&rows[2][0..2], "10");
    assert_eq!(cell(&rows, 0, 22), '0');
    assert_eq!(cell(&rows, 4, 2), '^');
    assert_eq!(cell(&rows, 72, 22), '>');
}

#[test]
fn successive_frames_are_captured_whole() {
    let mut plot = graph(80, 24);
    for n in 1..=3 {
        let values: Vec<f32> = (0..n).map(|i| i as f32).collect();
        plot.plot_points(&values, 0.0, 10.0, "Load").unwrap();
        plot.canvas_mut().present().unwrap();
    }

    let frames = plot.canvas().terminal().frames();
    assert_eq!(frames.len(), 3);
    assert!(frames.iter().all(|f| f.chars().count() == 80 * 24));
    assert_eq!(frames[0].matches('*').count(), 1);
    assert_eq!(frames[2].matches('*').count(), 3);
    assert!(frames[2].contains("Load"));
}

#[test]
fn rendered_frame_matches_rows() {
    let mut plot = graph(40, 12);
    plot.draw_axis("y");
    let canvas = plot.canvas();
    assert_eq!(canvas.render(), canvas.framebuffer().rows().concat());
}
