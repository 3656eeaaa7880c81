/// Bar colors cycled across crop categories, in assignment order.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#FF8C00", // orange
    "#FFD700", // gold
    "#ADFF2F", // green-yellow
    "#1E90FF", // dodger blue
    "#8A2BE2", // blue-violet
    "#FF6347", // tomato
    "#40E0D0", // turquoise
    "#9ACD32", // yellow-green
    "#8B0000", // dark red
    "#00FA9A", // spring green
];

/// Chart color configuration passed down explicitly to summarization,
/// rather than read from process-wide theme state.
///
/// Categories beyond the palette length wrap around via modulo indexing,
/// so assignment stays deterministic for any number of crops.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPalette {
    colors: Vec<String>,
}

impl Default for ChartPalette {
    fn default() -> Self {
        ChartPalette {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ChartPalette {
    /// Build a palette from custom colors. An empty list falls back to the
    /// default palette so modulo cycling always has a nonzero divisor.
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            ChartPalette::default()
        } else {
            ChartPalette { colors }
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// The color for a category index, cycling past the palette end.
    pub fn color_for(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}
