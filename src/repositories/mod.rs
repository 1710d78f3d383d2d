pub mod parser_repository;
