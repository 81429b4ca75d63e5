//! View routing contract.

/// The two employee-facing views this core navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Bills,
    NewBill,
}

impl Route {
    /// Hash-style pathname handed to the view host.
    pub fn path(self) -> &'static str {
        match self {
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }
}

/// Swaps the rendered view. Synchronous and assumed always to succeed.
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: Route);
}
