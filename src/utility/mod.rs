pub mod ip_fetcher;
