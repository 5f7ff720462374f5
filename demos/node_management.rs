//! Node management operations using the UpCloud client.
//!
//! This program reads API credentials from the environment (or a `.env`
//! file), prints the catalog of zones, plans and images, lists the account's
//! servers and, when `UPCLOUD_DEMO_REBOOT` names a server UUID, restarts it.
//! Set `UPCLOUD_DEMO_CREATE=1` to also create a small server from the first
//! template in `fi-hel1`.

use leeca_upcloud::{CreateNodeParams, NodeDriver, StorageType, UpcloudClient, UpcloudResult};

#[tokio::main]
async fn main() -> UpcloudResult<()> {
    let client = UpcloudClient::from_env()?;
    println!("Driver: {}", client.name());

    // 1. Catalog.
    println!("\nLocations:");
    let locations = client.list_locations().await?;
    for location in &locations {
        println!(
            "  • {} ({}) [{}]",
            location.id, location.name, location.country
        );
    }

    println!("\nSizes:");
    let sizes = client.list_sizes().await?;
    for size in &sizes {
        println!(
            "  • {}: {} cores, {} MiB RAM, {} GB {} disk",
            size.name, size.extra.core_number, size.ram, size.disk, size.extra.storage_tier
        );
    }

    println!("\nImages:");
    let images = client.list_images().await?;
    for image in &images {
        println!(
            "  • [{}] {} ({})",
            image.extra.storage_type, image.name, image.id
        );
    }

    // 2. Servers.
    println!("\nNodes:");
    let nodes = client.list_nodes().await?;
    if nodes.is_empty() {
        println!("  No nodes found.");
    }
    for node in &nodes {
        println!(
            "  • {} ({}) {:?} public={:?} private={:?}",
            node.name, node.id, node.state, node.public_ips, node.private_ips
        );
    }

    // 3. Optional creation.
    if std::env::var("UPCLOUD_DEMO_CREATE").as_deref() == Ok("1") {
        let template = images
            .iter()
            .find(|i| i.extra.storage_type == StorageType::Template);
        let location = locations.iter().find(|l| l.id == "fi-hel1");

        if let (Some(image), Some(size), Some(location)) = (template, sizes.first(), location) {
            let params = CreateNodeParams::builder()
                .name("leeca-demo")
                .image(image.clone())
                .size(size.clone())
                .location(location.clone())
                .build()?;

            let node = client.create_node(&params).await?;
            println!("\nCreated node {} ({:?})", node.id, node.state);
            if let Some(password) = &node.extra.password {
                println!("  Root password: {}", password);
            }
        } else {
            println!("\nNo template, plan or fi-hel1 zone available; skipping creation.");
        }
    }

    // 4. Optional restart.
    if let Ok(uuid) = std::env::var("UPCLOUD_DEMO_REBOOT") {
        match nodes.iter().find(|n| n.id == uuid) {
            Some(node) => {
                client.reboot_node(node).await?;
                println!("\nRestart requested for {}", node.name);
            }
            None => println!("\nNode {} not found", uuid),
        }
    }

    Ok(())
}
