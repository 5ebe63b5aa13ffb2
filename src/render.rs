//! Configuration rendering for the SNMP daemon.

pub mod snmpd;

pub use snmpd::render;
