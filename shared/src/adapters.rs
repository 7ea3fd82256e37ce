use crate::core::{MovieRecord, MovieRepository, StoreError};
use async_trait::async_trait;
use aws_sdk_dynamodb::{
    error::DisplayErrorContext,
    types::{
        AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput,
        ScalarAttributeType, TableStatus,
    },
    Client,
};
use std::collections::HashMap;

pub const PARTITION_KEY: &str = "year";
pub const SORT_KEY: &str = "title";

#[derive(Debug)]
pub struct DynamoDbMovieRepository {
    table_name: String,
    dynamodb_client: Client,
}

impl DynamoDbMovieRepository {
    pub fn new(table_name: String, dynamodb_client: Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl MovieRepository for DynamoDbMovieRepository {
    async fn create_table(
        &self,
        read_capacity_units: i64,
        write_capacity_units: i64,
    ) -> Result<(), StoreError> {
        let key_schema = vec![
            key_schema_element(PARTITION_KEY, KeyType::Hash)?,
            key_schema_element(SORT_KEY, KeyType::Range)?,
        ];
        let attribute_definitions = vec![
            string_attribute_definition(PARTITION_KEY)?,
            string_attribute_definition(SORT_KEY)?,
        ];
        let provisioned_throughput = ProvisionedThroughput::builder()
            .read_capacity_units(read_capacity_units)
            .write_capacity_units(write_capacity_units)
            .build()
            .map_err(|e| StoreError::CreateTable(e.to_string()))?;

        let result = self
            .dynamodb_client
            .create_table()
            .table_name(&self.table_name)
            .set_key_schema(Some(key_schema))
            .set_attribute_definitions(Some(attribute_definitions))
            .provisioned_throughput(provisioned_throughput)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                let generic_err_msg = DisplayErrorContext(&e).to_string();
                if e.into_service_error().is_resource_in_use_exception() {
                    Err(StoreError::TableAlreadyExists(self.table_name.clone()))
                } else {
                    Err(StoreError::CreateTable(generic_err_msg))
                }
            }
        }
    }

    async fn table_status(&self) -> Result<Option<TableStatus>, StoreError> {
        let result = self
            .dynamodb_client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await;

        match result {
            Ok(output) => Ok(output.table.and_then(|table| table.table_status)),
            Err(e) => {
                let generic_err_msg = DisplayErrorContext(&e).to_string();
                if e.into_service_error().is_resource_not_found_exception() {
                    Ok(None)
                } else {
                    Err(StoreError::DescribeTable(generic_err_msg))
                }
            }
        }
    }

    async fn put_movie(&self, movie: MovieRecord) -> Result<(), StoreError> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(movie_to_item(&movie)))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| StoreError::PutItem(DisplayErrorContext(&e).to_string()))
    }

    async fn list_movies(&self) -> Result<Vec<MovieRecord>, StoreError> {
        let result = self
            .dynamodb_client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StoreError::Scan(DisplayErrorContext(&e).to_string()))?;

        Ok(result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_movie)
            .collect())
    }

    async fn find_movies_by_year(&self, year: &str) -> Result<Vec<MovieRecord>, StoreError> {
        let result = self
            .dynamodb_client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#year = :year")
            // `year` is a DynamoDB reserved word
            .expression_attribute_names("#year", PARTITION_KEY)
            .expression_attribute_values(":year", AttributeValue::S(year.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::Query(DisplayErrorContext(&e).to_string()))?;

        Ok(result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_movie)
            .collect())
    }
}

fn key_schema_element(name: &str, key_type: KeyType) -> Result<KeySchemaElement, StoreError> {
    KeySchemaElement::builder()
        .attribute_name(name)
        .key_type(key_type)
        .build()
        .map_err(|e| StoreError::CreateTable(e.to_string()))
}

fn string_attribute_definition(name: &str) -> Result<AttributeDefinition, StoreError> {
    AttributeDefinition::builder()
        .attribute_name(name)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| StoreError::CreateTable(e.to_string()))
}

fn movie_to_item(movie: &MovieRecord) -> HashMap<String, AttributeValue> {
    [
        ("year", &movie.year),
        ("title", &movie.title),
        ("genre", &movie.genre),
        ("rating", &movie.rating),
        ("cover_url", &movie.cover_url),
    ]
    .into_iter()
    .filter_map(|(name, value)| {
        value
            .as_ref()
            .map(|v| (name.to_string(), AttributeValue::S(v.clone())))
    })
    .collect()
}

fn item_to_movie(item: &HashMap<String, AttributeValue>) -> MovieRecord {
    MovieRecord {
        year: attribute_text(item, "year"),
        title: attribute_text(item, "title"),
        genre: attribute_text(item, "genre"),
        rating: attribute_text(item, "rating"),
        cover_url: attribute_text(item, "cover_url"),
    }
}

// Numbers come back as their textual form; any other type counts as missing.
fn attribute_text(item: &HashMap<String, AttributeValue>, name: &str) -> Option<String> {
    match item.get(name) {
        Some(AttributeValue::S(s)) | Some(AttributeValue::N(s)) => Some(s.clone()),
        _ => None,
    }
}
