//! Span macros for classification and data loading.

/// Create a classification span.
#[macro_export]
macro_rules! classify_span {
    ($type_a:expr, $type_b:expr) => {
        tracing::info_span!("lovetype.classify", type_a = %$type_a, type_b = %$type_b)
    };
}

/// Create a dataset load span.
#[macro_export]
macro_rules! load_span {
    ($dir:expr) => {
        tracing::info_span!("lovetype.load", dir = %$dir)
    };
}

