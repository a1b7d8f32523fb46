// Validation traits

use crate::ValidationErrors;

/// Types that can check their own values without a rendered form.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
