use crate::Result;
use plotly::{
    Layout, Plot, Scatter,
    common::{Marker, MarkerSymbol, Mode, Title},
    layout::Axis,
};
use std::fs;
use std::path::Path;

/// Scatter of the first two coordinates of each particle.
pub fn particle_scatter(positions: &[[f64; 3]]) -> Plot {
    let x: Vec<f64> = positions.iter().map(|p| p[0]).collect();
    let y: Vec<f64> = positions.iter().map(|p| p[1]).collect();

    let trace = Scatter::new(x, y)
        .mode(Mode::Markers)
        .name("particles")
        .marker(
            Marker::new()
                .size(6)
                .color("black")
                .symbol(MarkerSymbol::Circle),
        );

    let layout = Layout::new()
        .title(Title::with_text("Particle positions"))
        .x_axis(Axis::new().title(Title::with_text("x1")))
        .y_axis(Axis::new().title(Title::with_text("x2")))
        .show_legend(false);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Write the scatter as a standalone HTML page, creating parent directories.
pub fn write_scatter<P: AsRef<Path>>(positions: &[[f64; 3]], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, particle_scatter(positions).to_html())?;
    log::info!("Scatter plot written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_scatter_uses_first_two_coordinates() {
        let positions = [[1.0, 2.0, 3.0], [4.0, -5.0, 6.0], [0.5, 0.25, -1.0]];
        let plot = particle_scatter(&positions);
        let json: Value = serde_json::from_str(&plot.to_json()).unwrap();

        let trace = &json["data"][0];
        assert_eq!(trace["mode"], "markers");
        let xs: Vec<f64> = trace["x"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        let ys: Vec<f64> = trace["y"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        assert_eq!(xs, vec![1.0, 4.0, 0.5]);
        assert_eq!(ys, vec![2.0, -5.0, 0.25]);
    }

    #[test]
    fn test_write_scatter_creates_html() {
        let dir = std::env::temp_dir().join(format!("pso_plot_{}", std::process::id()));
        let path = dir.join("nested").join("scatter.html");
        write_scatter(&[[1.0, 1.0, 1.0]], &path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        fs::remove_dir_all(&dir).ok();
        assert!(html.contains("Particle positions"));
    }
}
