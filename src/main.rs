fn main() -> anyhow::Result<()> {
    dfs_client::main()
}
