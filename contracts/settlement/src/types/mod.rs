pub mod pending_loan;
