use crate::cli::context::{runtime, Context};
use crate::cli::{render, CliError};
use crate::forms::ProductForm;
use crate::models::RecordId;

use super::CallableTrait;

/// `buzon products list [--json]`
pub struct ListProductsCommand {
    pub json: bool,
}

impl ListProductsCommand {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl CallableTrait for ListProductsCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Context::load()?.catalog()?;
        let products = runtime()?.block_on(catalog.products());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&products)?);
            return Ok(());
        }
        if products.is_empty() {
            eprintln!("No products found.");
            return Ok(());
        }

        println!("{:<6} {:<30} {:>16}  {}", "ID", "NAME", "PRICE", "STOCK");
        println!("{}", "─".repeat(66));
        for product in &products {
            println!("{}", render::product(product));
        }
        eprintln!("\n{} product(s) total.", products.len());

        Ok(())
    }
}

/// `buzon products add --name --price --stock [--description] [--image]`
pub struct AddProductCommand {
    pub form: ProductForm,
}

impl AddProductCommand {
    pub fn new(
        name: String,
        price: i64,
        stock: i64,
        description: Option<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            form: ProductForm {
                name,
                description: description.unwrap_or_default(),
                price,
                image: image.unwrap_or_default(),
                stock,
            },
        }
    }
}

impl CallableTrait for AddProductCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Context::load()?.catalog()?;

        let product = runtime()?
            .block_on(catalog.add_product(self.form.clone()))
            .map_err(CliError::from)?;
        println!("Product {} saved: {}", product.id, product.name);

        Ok(())
    }
}

/// `buzon products delete ID`
pub struct DeleteProductCommand {
    pub id: RecordId,
}

impl DeleteProductCommand {
    pub fn new(id: &str) -> Self {
        Self {
            id: RecordId::from(id.trim()),
        }
    }
}

impl CallableTrait for DeleteProductCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Context::load()?.catalog()?;

        runtime()?
            .block_on(catalog.delete_product(&self.id))
            .map_err(CliError::from)?;
        println!("Product {} deleted.", self.id);

        Ok(())
    }
}
