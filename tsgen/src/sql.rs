//! Raw-SQL namespace emitter.
//!
//! Illustrative data-access glue, separate from the core emitters: for each
//! model it renders a TypeScript namespace whose functions build
//! parameterized SQL strings from the model's field and primary-key lists,
//! plus the shared `PG` wrapper and a client-connection preamble.

use crate::dmmf::Model;

/// Render the pooled-client connection preamble.
///
/// `env_var` names the environment variable carrying the connection string;
/// it defaults to `DATABASE_URL`.
pub fn client_preamble(env_var: Option<&str>) -> String {
    let env_var = env_var.unwrap_or("DATABASE_URL");
    format!(
        r#"import "dotenv/config";
import {{ Pool }} from "pg";

// With connection string
const client = new Pool({{
    connectionString: process.env.{env_var}!
}});

export async function connect() {{
    await client.connect();
}}
"#
    )
}

/// Wrap generated namespaces in the shared `PG` namespace that owns the
/// low-level query entry point.
pub fn pg_namespace(body: &str) -> String {
    format!(
        r#"export namespace PG {{
    // PG.$rawQuery
    export function $rawQuery(query: string, values: any[] = []) {{
        return client.query(query, values)
    }}

    {body}
}}"#
    )
}

/// Render one query-builder namespace per model, joined by blank lines.
pub fn table_namespaces(models: &[Model]) -> String {
    models
        .iter()
        .map(table_namespace)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn table_namespace(model: &Model) -> String {
    let name = &model.name;

    let primary_key_fields: Vec<&str> = model
        .fields
        .iter()
        .filter(|field| field.is_id)
        .map(|field| field.name.as_str())
        .collect();

    let pk_type = if primary_key_fields.is_empty() {
        "never".to_string()
    } else {
        format!("Pick<{name}, \"{}\">", primary_key_fields.join("\" | \""))
    };

    let pk_where = primary_key_fields
        .iter()
        .enumerate()
        .map(|(i, field)| format!("{field} = {}", i + 1))
        .collect::<Vec<_>>()
        .join(" AND ");

    format!(
        r#"type {name}PK = {pk_type};
type {name}OrderByWithRelationInput = {{
    [P in keyof {name}]?: "asc" | "desc";
}};
type {name}Select = {{
    [P in keyof {name}]?: boolean;
}};
type {name}Include = {{
    [P in keyof {name}]?: boolean;
}};
type {name}GetPayload<S extends boolean | null | undefined | {name}Select, U = keyof S> = S extends true
    ? {name}
    : S extends {name}Select
        ? {{
            [P in keyof S & keyof {name}]: P extends keyof {name} ? {name}[P] : never;
        }}
        : never;
type {name}WhereInput = {{
    [P in keyof {name}]?: {name}[P] | null;
}};
type findManyArgs = {{
    select?: {name}Select | null;
    include?: {name}Include | null;
    where?: {name}WhereInput;
    orderBy?: {name}OrderByWithRelationInput;
    cursor?: {name}PK;
    take?: number;
    skip?: number;
    distinct?: Array<keyof {name}>;
}};

export namespace {name} {{
    export function findUnique(args: {{ where: {name}PK; select?: {name}Select | null }}) {{
        const query = `SELECT ${{args.select ? Object.keys(args.select).join(", ") : "*"}} FROM {name} WHERE {pk_where} LIMIT 1`;
        return PG.$rawQuery(query, Object.values(args.where));
    }}

    export function findMany(args: findManyArgs) {{
        const where = args.where
            ? "WHERE " +
              Object.entries(args.where)
                  .map(([key, value], i) => `${{key}} = ${{i + 1}}`)
                  .join(" AND ")
            : "";
        const orderBy = args.orderBy
            ? "ORDER BY " +
              Object.entries(args.orderBy)
                  .map(([key, value]) => `${{key}} ${{value}}`)
                  .join(", ")
            : "";
        const query = `SELECT ${{args.select ? Object.keys(args.select).join(", ") : "*"}} FROM {name} ${{where}} ${{orderBy}} LIMIT ${{args.take || "ALL"}} OFFSET ${{args.skip || 0}}`;
        return PG.$rawQuery(query, args.where ? Object.values(args.where) : []);
    }}

    export function create(data: {name}) {{
        const keys = Object.keys(data);
        const values = keys.map((_, i) => `${{i + 1}}`).join(", ");
        const query = `INSERT INTO {name} (${{keys.join(", ")}}) VALUES (${{values}}) RETURNING *`;
        return PG.$rawQuery(query, Object.values(data));
    }}

    export function update(args: {{ where: {name}PK; data: Partial<{name}> }}) {{
        const dataKeys = Object.keys(args.data);
        const dataClause = dataKeys.map((key, i) => `${{key}} = ${{i + 1}}`).join(", ");
        const whereClause = Object.keys(args.where)
            .map((key, i) => `${{key}} = ${{i + 1 + dataKeys.length}}`)
            .join(" AND ");
        const query = `UPDATE {name} SET ${{dataClause}} WHERE ${{whereClause}} RETURNING *`;
        return PG.$rawQuery(query, [...Object.values(args.data), ...Object.values(args.where)]);
    }}

    export function delete(args: {{ where: {name}PK }}) {{
        const whereClause = Object.keys(args.where)
            .map((key, i) => `${{key}} = ${{i + 1}}`)
            .join(" AND ");
        const query = `DELETE FROM {name} WHERE ${{whereClause}} RETURNING *`;
        return PG.$rawQuery(query, Object.values(args.where));
    }}
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dmmf::{Field, ScalarType};

    fn users() -> Model {
        Model::new(
            "users",
            vec![
                Field::scalar("id", ScalarType::Int).id(),
                Field::scalar("email", ScalarType::String),
            ],
        )
    }

    #[test]
    fn test_primary_key_type() {
        let rendered = table_namespaces(&[users()]);
        assert!(rendered.contains("type usersPK = Pick<users, \"id\">;"));
    }

    #[test]
    fn test_composite_primary_key() {
        let model = Model::new(
            "memberships",
            vec![
                Field::scalar("userId", ScalarType::Int).id(),
                Field::scalar("groupId", ScalarType::Int).id(),
            ],
        );
        let rendered = table_namespaces(&[model]);
        assert!(rendered.contains("type membershipsPK = Pick<memberships, \"userId\" | \"groupId\">;"));
        assert!(rendered.contains("WHERE userId = 1 AND groupId = 2 LIMIT 1"));
    }

    #[test]
    fn test_no_primary_key_is_never() {
        let model = Model::new("logs", vec![Field::scalar("line", ScalarType::String)]);
        let rendered = table_namespaces(&[model]);
        assert!(rendered.contains("type logsPK = never;"));
    }

    #[test]
    fn test_namespace_exposes_all_operations() {
        let rendered = table_namespaces(&[users()]);
        for operation in [
            "export function findUnique",
            "export function findMany",
            "export function create",
            "export function update",
            "export function delete",
        ] {
            assert!(rendered.contains(operation), "missing {operation}");
        }
    }

    #[test]
    fn test_pg_namespace_wraps_body() {
        let wrapped = pg_namespace("export namespace users {}");
        assert!(wrapped.starts_with("export namespace PG {"));
        assert!(wrapped.contains("export function $rawQuery"));
        assert!(wrapped.contains("export namespace users {}"));
    }

    #[test]
    fn test_client_preamble_env_var() {
        let preamble = client_preamble(None);
        assert!(preamble.contains("process.env.DATABASE_URL!"));

        let preamble = client_preamble(Some("PG_URL"));
        assert!(preamble.contains("process.env.PG_URL!"));
    }
}
