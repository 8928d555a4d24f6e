use std::sync::Arc;

use crate::plugin::Plugin;
use crate::template::{Formatter, FormatterArgs, Templates};

/// Registers the value formatter for one column data type.
///
/// Data cells whose column declares this data type render the formatter's
/// output instead of the raw value. Several providers may be registered, one
/// per data type; a later provider for the same type replaces an earlier one.
pub struct DataTypeProvider<R, N> {
    data_type: String,
    formatter: Formatter<R, N>,
}

impl<R, N> DataTypeProvider<R, N> {
    pub fn new(
        data_type: impl Into<String>,
        formatter: impl Fn(FormatterArgs<'_, R>) -> N + Send + Sync + 'static,
    ) -> Self {
        Self {
            data_type: data_type.into(),
            formatter: Arc::new(formatter),
        }
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }
}

impl<R, N> Plugin<R, N> for DataTypeProvider<R, N>
where
    R: 'static,
    N: 'static,
{
    fn name(&self) -> &'static str {
        "DataTypeProvider"
    }

    fn singleton(&self) -> bool {
        false
    }

    fn register(&self, templates: &mut Templates<R, N>) {
        templates.formatter_for(self.data_type.clone(), Arc::clone(&self.formatter));
    }
}
