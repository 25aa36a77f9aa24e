pub mod range;
pub mod unit;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and outputs the value of the
/// expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Calculate the number of hexagons in a grid based on its layer count. 0
/// layers means 1 hexagon, 1 is 7 hexagons, 2 is 19, etc.
pub fn grid_len(layers: u16) -> usize {
    // We'll always have 3L^2+3L+1 hexagons (a reduction of a geometric sum).
    // f(0) = 1, and we add 6L hexagons for every layer after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let l = layers as usize;
    3 * l * l + 3 * l + 1
}
