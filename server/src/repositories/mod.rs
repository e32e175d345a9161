pub mod quote_repository;
