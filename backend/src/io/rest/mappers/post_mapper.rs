use crate::domain::commands::posts::{CreatePostCommand, DeleteAck, PostSummary, UpdatePostCommand};
use crate::domain::models::Page;
use shared::{
    CreatePostRequest, CreatePostResponse, DeletePostResponse, PageResponse, ReadPostResponse,
    UpdatePostRequest, UpdatePostResponse,
};

/// Mapper between the public post DTOs and domain commands/results.
pub struct PostMapper;

impl PostMapper {
    pub fn to_create_command(dto: CreatePostRequest) -> CreatePostCommand {
        CreatePostCommand {
            title: dto.title,
            content: dto.content,
        }
    }

    pub fn to_update_command(dto: UpdatePostRequest) -> UpdatePostCommand {
        UpdatePostCommand {
            title: dto.title,
            content: dto.content,
        }
    }

    pub fn to_create_response(domain: PostSummary) -> CreatePostResponse {
        CreatePostResponse {
            post_id: domain.post_id,
            title: domain.title,
            content: domain.content,
        }
    }

    pub fn to_read_response(domain: PostSummary) -> ReadPostResponse {
        ReadPostResponse {
            post_id: domain.post_id,
            title: domain.title,
            content: domain.content,
        }
    }

    pub fn to_update_response(domain: PostSummary) -> UpdatePostResponse {
        UpdatePostResponse {
            post_id: domain.post_id,
            title: domain.title,
            content: domain.content,
        }
    }

    pub fn to_delete_response(domain: DeleteAck) -> DeletePostResponse {
        DeletePostResponse {
            post_id: domain.post_id,
        }
    }

    pub fn to_page_response(domain: Page<PostSummary>) -> PageResponse<ReadPostResponse> {
        let first = domain.is_first();
        let last = domain.is_last();
        let page = domain.map(Self::to_read_response);

        PageResponse {
            number_of_elements: page.items.len(),
            content: page.items,
            page_number: page.page_number,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            first,
            last,
        }
    }
}
