use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use super::{memory, Cfg};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{rocket_test_setup, rocket_test_setup_with_cfg};

    pub use crate::core::prelude::*;
}

fn rocket_test_instance_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    rocket_cfg: RocketCfg,
) -> (rocket::Rocket<rocket::Build>, memory::Connections) {
    let connections = memory::Connections::from(fbdb_db_memory::Connections::init());
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket_cfg),
        cfg,
        version: prelude::DUMMY_VERSION,
    };
    let rocket = super::rocket_instance(options, connections.clone());
    (rocket, connections)
}

pub fn rocket_test_setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, memory::Connections) {
    rocket_test_setup_with_cfg(mounts, Cfg::default())
}

pub fn rocket_test_setup_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
) -> (Client, memory::Connections) {
    let rocket_cfg = RocketCfg::debug_default();
    let (rocket, connections) = rocket_test_instance_with_cfg(mounts, cfg, rocket_cfg);
    let client = Client::tracked(rocket).unwrap();
    (client, connections)
}

#[test]
fn mount_api_and_frontend() {
    let (client, _) = rocket_test_setup(super::mounts());
    let res = client.get("/api/server/version").dispatch();
    assert_eq!(res.status(), prelude::Status::Ok);
    assert_eq!(res.into_string().unwrap(), prelude::DUMMY_VERSION);
    #[cfg(feature = "frontend")]
    {
        let res = client.get("/hello").dispatch();
        assert_eq!(res.status(), prelude::Status::Ok);
    }
}
