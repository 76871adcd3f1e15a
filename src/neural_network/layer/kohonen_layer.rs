use crate::ModelError;

/// Kohonen (self-organizing map) layer.
///
/// Neurons are arranged on a `rows x cols` rectangular grid and identified by their
/// position. Position neurons have no bias, which is why this layer is not an
/// `ActivationLayer`; only the synapses of a `KohonenConnector` that target it are
/// initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KohonenLayer {
    rows: usize,
    cols: usize,
}

impl KohonenLayer {
    /// Creates a Kohonen layer with the given grid size.
    ///
    /// # Parameters
    ///
    /// - `rows` - Number of rows in the grid
    /// - `cols` - Number of columns in the grid
    ///
    /// # Returns
    ///
    /// - `Ok(Self)` - A new KohonenLayer
    /// - `Err(ModelError::InputValidationError)` - If `rows` or `cols` is zero
    pub fn new(rows: usize, cols: usize) -> Result<Self, ModelError> {
        if rows == 0 || cols == 0 {
            return Err(ModelError::InputValidationError(format!(
                "Kohonen grid must have at least one row and one column, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self { rows, cols })
    }

    get_field!(get_rows, rows, usize);

    get_field!(get_cols, cols, usize);

    /// Returns the number of position neurons in the grid
    pub fn get_neuron_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Iterates over the grid positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
    }

    /// Converts a grid position into its row-major index.
    pub(crate) fn index_of(&self, position: (usize, usize)) -> usize {
        position.0 * self.cols + position.1
    }
}
