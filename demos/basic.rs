//! Basic example demonstrating the GitHub API gateway.
//!
//! Run with:
//! ```
//! GITHUB_USER=octocat GITHUB_TOKEN=your-token cargo run --example basic
//! ```

use octogate::{GithubGateway, QueryKey, QueryParameter};

#[tokio::main]
async fn main() -> octogate::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create the gateway from environment variables
    let gateway = GithubGateway::from_env()?;

    // Fetch the configured user's profile
    println!("--- User ---");
    let user = gateway.users().get_user().await?;
    println!("{} (id {})", user.login, user.id);
    if let Some(name) = &user.name {
        println!("  name: {name}");
    }
    println!("  followers: {}, following: {}", user.followers, user.following);

    // First page of followers, default page size
    println!("\n--- Followers ---");
    let followers = gateway.users().get_user_followers().await?;
    for follower in &followers {
        println!("  - {}", follower.login);
    }

    // Repositories with an explicit page size
    println!("\n--- Repositories (first 5) ---");
    let query = QueryParameter::new().set(QueryKey::PerPage, 5u32);
    let repos = gateway.users().get_user_repositories_with_query(&query).await?;
    for repo in &repos {
        let language = repo.language.as_deref().unwrap_or("unknown");
        println!("  - {} ({language}, {} stars)", repo.name, repo.stargazers_count);
    }

    // Issues of a well-known repository
    println!("\n--- Issues of octocat/hello-world ---");
    let issues = gateway
        .repository()
        .get_issues_with_query("octocat/hello-world", &query)
        .await?;
    for issue in &issues {
        println!(
            "  #{} {}",
            issue.number,
            issue.title.as_deref().unwrap_or("(untitled)")
        );
    }

    Ok(())
}
