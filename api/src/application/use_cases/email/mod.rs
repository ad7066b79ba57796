pub mod send_report;
