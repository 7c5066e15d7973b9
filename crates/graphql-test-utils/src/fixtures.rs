//! Shared test fixtures for GraphQL schemas and documents.
//!
//! Use these for tests that don't need custom schemas. For tests where the
//! schema structure is the point of the test, prefer inline fixtures to keep
//! the test self-documenting.

/// Query, User and Address: the smallest schema with a nested object chain.
pub const ADDRESS_SCHEMA: &str = r#"
type Query {
    user(id: ID!): User
}

type User {
    id: ID!
    address: Address
}

type Address {
    city: String
}
"#;

/// Query selecting through User into Address on [`ADDRESS_SCHEMA`].
pub const ADDRESS_QUERY: &str = r#"
{
    user(id: "1") {
        address {
            city
        }
    }
}
"#;

/// Schema with interfaces and union types.
///
/// Useful for testing:
/// - Fragment spreads on interfaces
/// - Expansion of abstract types to their implementers
pub const INTERFACE_SCHEMA: &str = r#"
type Query {
    node(id: ID!): Node
    search(query: String!): [SearchResult!]!
}

interface Node {
    id: ID!
}

type User implements Node {
    id: ID!
    name: String!
}

type Post implements Node {
    id: ID!
    title: String!
    author: User!
}

type Comment {
    text: String!
}

union SearchResult = Post | Comment
"#;

/// Schema with nested input objects, lists and enums.
///
/// Useful for testing:
/// - Input object closure over every declared field
/// - List and enum literals
/// - Variable definitions
pub const INPUT_SCHEMA: &str = r#"
type Query {
    users(filter: UserFilter, statuses: [UserStatus!]): [User!]!
}

type Mutation {
    createUser(input: CreateUserInput!): User!
}

type User {
    id: ID!
    name: String!
    status: UserStatus!
}

input CreateUserInput {
    name: String!
    profile: ProfileInput
}

input ProfileInput {
    bio: String
    birthday: Date
}

input UserFilter {
    nameContains: String
    status: UserStatus
    page: PageInput
}

input PageInput {
    limit: Int
    after: Cursor
}

scalar Date
scalar Cursor

enum UserStatus {
    ACTIVE
    INACTIVE
}
"#;

/// Schema containing both names the default type policy acts on.
pub const POLICY_SCHEMA: &str = r#"
type Query {
    validate(input: String): _VInputParsingError_
    governmentId: Common_GovernmentId
}

type _VInputParsingError_ {
    message: String
}

type Common_GovernmentId {
    value: String
}
"#;

/// Operation spreading a fragment defined in the same document.
pub const QUERY_WITH_FRAGMENT: &str = r#"
query GetNode($id: ID!) {
    node(id: $id) {
        ...PostFields
    }
}

fragment PostFields on Post {
    title
    author {
        name
    }
}
"#;
