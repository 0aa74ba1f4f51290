pub mod table_server;
