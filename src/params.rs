pub const DEFAULT_NUMBER_OF_BASIS_FUNCTIONS : usize = 20;

//Bandwidth of the implied kernel. Periods are drawn with standard deviation sqrt(2 * gamma)
pub const DEFAULT_GAMMA : f64 = 1.0f64;

//Small, so that the fit stays close to ordinary least squares while
//still tolerating fewer samples than basis functions
pub const DEFAULT_REGULARIZATION : f64 = 0.000001f64;

//Cosine features have no use for an intercept, the phases already shift them
pub const USE_OFFSET : bool = false;

pub const APPROXIMATOR_NAME : &str = "RRRFF";

pub const MATRIX_FILE_EXTENSION : &str = "txt";

//Upper bound on the number of points of a diagnostic grid
pub const MAX_GRID_POINTS : usize = 1 << 24;
