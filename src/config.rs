use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use clap::Parser;

pub const DEFAULT_APP_PORT: u16 = 5006;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env = "APP_PORT", long, default_value_t = DEFAULT_APP_PORT)]
    pub app_port: u16,

    #[clap(env = "APP_HOST", long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub app_host: IpAddr,

    #[clap(env, long, default_value = "local")]
    pub environment: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.app_host, self.app_port)
    }
}
